use std::collections::BTreeMap;

use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

use crate::classify::{Category, ClassificationResult, Classifier};
use crate::dialects::Dialect;
use crate::table::PatternTable;
use crate::types::{RpcError, SubmissionError};

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn result_to_js(result: &ClassificationResult) -> JsValue {
    let obj = serde_json::json!({
        "result": result,
        "categories": result.categories().map(|c| c.to_string()).collect::<Vec<_>>(),
        "disposition": result.disposition().as_ref(),
    });
    to_js(&obj)
}

/// Classify a raw error message against the built-in rules.
#[wasm_bindgen]
pub fn classify_message(message: &str) -> JsValue {
    result_to_js(&Classifier::builtin().classify_message(message))
}

/// Classify a JSON-RPC error object (`{"code": .., "message": ..}`).
#[wasm_bindgen]
pub fn classify_rpc_error(json: &str) -> JsValue {
    match RpcError::from_json(json) {
        Ok(rpc) => {
            let err = SubmissionError::from_rpc(&rpc);
            result_to_js(&Classifier::builtin().classify(Some(&err)))
        }
        Err(e) => error_result(&e.to_string()),
    }
}

/// Returns built-in rule counts per dialect and category.
#[wasm_bindgen]
pub fn get_all_dialects() -> JsValue {
    let table = PatternTable::builtin();
    let dialects: Vec<serde_json::Value> = Dialect::iter()
        .filter(|d| *d != Dialect::Other)
        .map(|d| {
            let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
            for rule in table.rules().filter(|r| r.dialect == d) {
                *counts.entry(rule.category.as_ref()).or_default() += 1;
            }
            serde_json::json!({ "id": d.as_ref(), "rules": counts })
        })
        .collect();
    let categories: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
    to_js(&serde_json::json!({ "dialects": dialects, "categories": categories }))
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

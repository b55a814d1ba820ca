#![forbid(unsafe_code)]

//! Wire-format fixture tests against a realistic compile API response.

use asmdiff_report::DiffOutput;
use serde_json::{Value, json};

fn fixture() -> Value {
    json!({
        "arch_str": "mips",
        "current_score": 250,
        "max_score": 1125,
        "error": null,
        "header": {
            "base": [{"text": "Target"}],
            "current": [{"text": "Current"}]
        },
        "rows": [
            {
                "key": "80:0",
                "base": {"text": [{"text": "addiu "}, {"text": "$sp", "format": "r", "group": "reg", "index": 0}, {"text": ", -0x18"}], "line": 0},
                "current": {"text": [{"text": "addiu "}, {"text": "$sp", "format": "r", "group": "reg", "index": 0}, {"text": ", -0x20"}], "line": 0, "src": "int main(void) {", "src_line": 3, "src_path": "src/main.c"}
            },
            {
                "key": "84:1",
                "current": {"text": [{"text": "sw $s0, 0x10($sp)"}], "line": 1}
            },
            {
                "key": "88:2",
                "base": {"text": [{"text": "jal "}, {"text": "func_80001234", "key": "func_80001234"}], "branch": 0},
                "current": {"text": [{"text": "jal "}, {"text": "func_80001234", "key": "func_80001234"}], "branch": 0}
            }
        ]
    })
}

#[test]
fn deserializes_compile_api_response() {
    let report: DiffOutput = serde_json::from_value(fixture()).unwrap();
    assert_eq!(report.arch_str, "mips");
    assert!(!report.has_error());
    assert_eq!(report.rows.len(), 3);
    assert!(report.rows[0].is_anchor());
    assert!(!report.rows[1].is_anchor());
    assert_eq!(report.rows[0].current.as_ref().unwrap().src_line, Some(3));
    assert_eq!(
        report.rows[2].base.as_ref().unwrap().text[1].key.as_deref(),
        Some("func_80001234")
    );
}

#[test]
fn reserializes_with_absent_fields_omitted() {
    let report: DiffOutput = serde_json::from_value(fixture()).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    // error stays an explicit null on the wire.
    assert!(value.get("error").unwrap().is_null());

    // Absent optional fields are omitted, not serialized as null.
    let unanchored = &value["rows"][1];
    assert!(unanchored.get("base").is_none());
    assert!(unanchored.get("previous").is_none());
    assert!(value["header"].get("previous").is_none());
    let plain_span = &value["rows"][1]["current"]["text"][0];
    assert!(plain_span.get("format").is_none());

    // Round trip is lossless.
    assert_eq!(value, fixture());
}

#[test]
fn error_response_still_parses() {
    let report: DiffOutput = serde_json::from_value(json!({
        "arch_str": "mips",
        "current_score": 0,
        "max_score": 0,
        "error": "compiler exited with status 1",
        "header": {"base": [], "current": []},
        "rows": []
    }))
    .unwrap();
    assert!(report.has_error());
    assert_eq!(report.match_percent(), None);
}

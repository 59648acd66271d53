use fcm_request::utils::{contains_null, prune};
use serde_json::json;

/// Test: Nulls are removed at every depth, including inside arrays
#[test]
fn test_prune_removes_nested_nulls() {
    let tree = json!({
        "a": null,
        "b": { "c": null, "d": 1 },
        "e": [ { "f": null, "g": "x" }, null, 2 ],
        "h": { "i": { "j": null } }
    });

    let pruned = prune(tree).unwrap();

    assert_eq!(
        pruned,
        json!({
            "b": { "d": 1 },
            "e": [ { "g": "x" }, 2 ]
        })
    );
    assert!(!contains_null(&pruned));
}

/// Test: Falsy scalars survive pruning
#[test]
fn test_prune_keeps_falsy_values() {
    let tree = json!({ "zero": 0, "no": false, "empty": "", "list": [] });

    assert_eq!(prune(tree.clone()), Some(tree));
}

/// Test: A tree made only of nulls prunes away entirely
#[test]
fn test_prune_all_null() {
    assert_eq!(prune(json!(null)), None);
    assert_eq!(prune(json!({ "a": null, "b": { "c": null } })), None);
}

/// Test: Pruning twice equals pruning once
#[test]
fn test_prune_is_idempotent() {
    let tree = json!({
        "message": {
            "token": "t",
            "android": { "notification": { "sound": null } },
            "items": [ { "x": null }, { "y": [null, { "z": null }] } ]
        }
    });

    let once = prune(tree).unwrap();
    let twice = prune(once.clone()).unwrap();

    assert_eq!(once, twice);
}

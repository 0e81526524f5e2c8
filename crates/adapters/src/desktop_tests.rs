// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn fake_records_calls_in_order() {
    let port = FakeDesktopPort::new();
    port.notify("first", "one").await.unwrap();
    port.notify("second", "two").await.unwrap();

    let calls = port.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].title, "first");
    assert_eq!(calls[1].message, "two");
}

#[tokio::test]
async fn fake_clone_shares_recorded_calls() {
    let port = FakeDesktopPort::new();
    let clone = port.clone();
    clone.notify("shared", "body").await.unwrap();
    assert_eq!(port.calls().len(), 1);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use async_trait::async_trait;
use hk_core::HookOutput;

struct StubHandler {
    name: &'static str,
    response: Response,
}

#[async_trait]
impl Handler for StubHandler {
    fn name(&self) -> &str {
        self.name
    }

    async fn handle(&self, _input: &HookInput) -> anyhow::Result<Response> {
        Ok(self.response.clone())
    }
}

struct FailingHandler {
    name: &'static str,
}

#[async_trait]
impl Handler for FailingHandler {
    fn name(&self) -> &str {
        self.name
    }

    async fn handle(&self, _input: &HookInput) -> anyhow::Result<Response> {
        anyhow::bail!("boom")
    }
}

struct PanickyHandler {
    name: &'static str,
}

#[async_trait]
impl Handler for PanickyHandler {
    fn name(&self) -> &str {
        self.name
    }

    async fn handle(&self, _input: &HookInput) -> anyhow::Result<Response> {
        panic!("kaboom");
    }
}

fn input_for(event: EventName) -> HookInput {
    HookInput { event_name: event, ..HookInput::default() }
}

#[tokio::test]
async fn dispatch_with_no_registered_handlers_is_zero_value() {
    let registry = Registry::new();
    let response = registry.dispatch(&input_for(EventName::Stop)).await;
    assert_eq!(response.exit_code, 0);
    assert!(response.stdout.is_none());
    assert_eq!(response.stderr, "");
}

#[tokio::test]
async fn unknown_event_is_zero_value() {
    let mut registry = Registry::new();
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "stop", response: Response::block("nope") }),
    );
    let response = registry.dispatch(&input_for(EventName::Unknown)).await;
    assert_eq!(response.exit_code, 0);
    assert_eq!(response.stderr, "");
}

#[tokio::test]
async fn exit_code_is_max_across_handlers() {
    let mut registry = Registry::new();
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "a", response: Response::ok() }),
    );
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "b", response: Response::block("blocked") }),
    );
    let response = registry.dispatch(&input_for(EventName::Stop)).await;
    assert_eq!(response.exit_code, 2);
}

#[tokio::test]
async fn stdout_is_first_non_nil_by_registration_order() {
    let mut registry = Registry::new();
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "a", response: Response::ok() }),
    );
    let mut second = HookOutput::default();
    second.system_message = Some("from b".to_string());
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "b", response: Response::with_stdout(second.clone()) }),
    );
    let mut third = HookOutput::default();
    third.system_message = Some("from c".to_string());
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "c", response: Response::with_stdout(third) }),
    );

    let response = registry.dispatch(&input_for(EventName::Stop)).await;
    assert_eq!(response.stdout, Some(second));
}

#[tokio::test]
async fn stderr_concatenates_in_registration_order() {
    let mut registry = Registry::new();
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "a", response: Response::with_stderr("first\n") }),
    );
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "b", response: Response::with_stderr("second\n") }),
    );
    let response = registry.dispatch(&input_for(EventName::Stop)).await;
    assert_eq!(response.stderr, "first\nsecond\n");
}

#[tokio::test]
async fn handler_error_is_formatted_and_does_not_abort_chain() {
    let mut registry = Registry::new();
    registry.register(EventName::Stop, std::sync::Arc::new(FailingHandler { name: "broken" }));
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "ok", response: Response::with_stderr("fine\n") }),
    );
    let response = registry.dispatch(&input_for(EventName::Stop)).await;
    assert_eq!(response.exit_code, 0);
    assert!(response.stderr.contains("[broken] error: boom"));
    assert!(response.stderr.contains("fine"));
}

#[tokio::test]
async fn panic_is_contained_and_formatted() {
    let mut registry = Registry::new();
    registry.register(EventName::Stop, std::sync::Arc::new(PanickyHandler { name: "panicky" }));
    registry.register(
        EventName::Stop,
        std::sync::Arc::new(StubHandler { name: "normal", response: Response::with_stdout(HookOutput::default()) }),
    );
    let response = registry.dispatch(&input_for(EventName::Stop)).await;
    assert!(response.stderr.contains("[panicky] error: panic: kaboom"));
    assert!(response.stdout.is_some());
}

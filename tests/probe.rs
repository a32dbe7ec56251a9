//! Health probe behavior against a scripted node.

use std::sync::Arc;

use alloy::primitives::U256;
use async_trait::async_trait;
use ethprobe::numeric::encode_quantity;
use ethprobe::{
    DetailValue, FailureKind, HealthIndicator, HealthStatus, ProbeRpc, RpcFailure,
};

/// A node whose six probe responses are scripted per test.
#[derive(Clone)]
struct ScriptedNode {
    listening: Result<bool, RpcFailure>,
    net_version: Result<String, RpcFailure>,
    client_version: Result<String, RpcFailure>,
    block_number: Result<String, RpcFailure>,
    protocol_version: Result<String, RpcFailure>,
    peer_count: Result<String, RpcFailure>,
}

impl ScriptedNode {
    fn healthy() -> Self {
        Self {
            listening: Ok(true),
            net_version: Ok("23".to_string()),
            client_version: Ok("ClientVersion".to_string()),
            block_number: Ok(encode_quantity(U256::from(120u64))),
            protocol_version: Ok("protocolVersion".to_string()),
            peer_count: Ok(encode_quantity(U256::from(80u64))),
        }
    }
}

#[async_trait]
impl ProbeRpc for ScriptedNode {
    async fn net_listening(&self) -> Result<bool, RpcFailure> {
        self.listening.clone()
    }

    async fn net_version(&self) -> Result<String, RpcFailure> {
        self.net_version.clone()
    }

    async fn web3_client_version(&self) -> Result<String, RpcFailure> {
        self.client_version.clone()
    }

    async fn eth_block_number(&self) -> Result<String, RpcFailure> {
        self.block_number.clone()
    }

    async fn eth_protocol_version(&self) -> Result<String, RpcFailure> {
        self.protocol_version.clone()
    }

    async fn net_peer_count(&self) -> Result<String, RpcFailure> {
        self.peer_count.clone()
    }
}

fn indicator(node: ScriptedNode) -> HealthIndicator<ScriptedNode> {
    HealthIndicator::new(Arc::new(node))
}

#[tokio::test]
async fn healthy_node_reports_up_with_all_five_details() {
    let doc = indicator(ScriptedNode::healthy()).probe().await;

    assert_eq!(doc.status, HealthStatus::Up);
    assert_eq!(doc.details.len(), 5);
    assert_eq!(doc.details["netVersion"], DetailValue::Text("23".into()));
    assert_eq!(
        doc.details["clientVersion"],
        DetailValue::Text("ClientVersion".into())
    );
    assert_eq!(
        doc.details["blockNumber"],
        DetailValue::Quantity(U256::from(120u64))
    );
    assert_eq!(
        doc.details["protocolVersion"],
        DetailValue::Text("protocolVersion".into())
    );
    assert_eq!(
        doc.details["netPeerCount"],
        DetailValue::Quantity(U256::from(80u64))
    );
}

#[tokio::test]
async fn gate_false_reports_down_without_detail_calls() {
    let node = ScriptedNode {
        listening: Ok(false),
        // Detail responses that would poison an Up document if the gate
        // were ignored.
        block_number: Err(RpcFailure::new(
            "eth_blockNumber",
            FailureKind::RpcFault,
            "must not be dispatched",
        )),
        ..ScriptedNode::healthy()
    };
    let doc = indicator(node).probe().await;

    assert_eq!(doc.status, HealthStatus::Down);
    assert_eq!(doc.details.len(), 1);
    assert!(doc.error().unwrap().starts_with("not-listening: "));
}

#[tokio::test]
async fn gate_error_reports_down_with_the_transport_descriptor() {
    let node = ScriptedNode {
        listening: Err(RpcFailure::new(
            "net_listening",
            FailureKind::ConnectFailed,
            "connection refused",
        )),
        ..ScriptedNode::healthy()
    };
    let doc = indicator(node).probe().await;

    assert_eq!(doc.status, HealthStatus::Down);
    assert_eq!(doc.details.len(), 1);
    assert_eq!(
        doc.error().unwrap(),
        "connect-failed: net_listening: connection refused"
    );
}

#[tokio::test]
async fn detail_failure_after_gate_reports_the_failing_method() {
    let node = ScriptedNode {
        block_number: Err(RpcFailure::new(
            "eth_blockNumber",
            FailureKind::RpcFault,
            "server error",
        )),
        ..ScriptedNode::healthy()
    };
    let doc = indicator(node).probe().await;

    assert_eq!(doc.status, HealthStatus::Down);
    assert_eq!(doc.details.len(), 1);
    assert_eq!(
        doc.error().unwrap(),
        "rpc-fault: eth_blockNumber: server error"
    );
}

#[tokio::test]
async fn first_failure_by_dispatch_order_wins() {
    let node = ScriptedNode {
        net_version: Err(RpcFailure::new(
            "net_version",
            FailureKind::RpcFault,
            "first by dispatch order",
        )),
        peer_count: Err(RpcFailure::new(
            "net_peerCount",
            FailureKind::RpcFault,
            "later by dispatch order",
        )),
        ..ScriptedNode::healthy()
    };
    let doc = indicator(node).probe().await;

    assert_eq!(doc.status, HealthStatus::Down);
    assert_eq!(
        doc.error().unwrap(),
        "rpc-fault: net_version: first by dispatch order"
    );
}

#[tokio::test]
async fn undecodable_quantity_is_an_rpc_fault_naming_the_method() {
    let node = ScriptedNode {
        peer_count: Ok("0xzz".to_string()),
        ..ScriptedNode::healthy()
    };
    let doc = indicator(node).probe().await;

    assert_eq!(doc.status, HealthStatus::Down);
    let error = doc.error().unwrap();
    assert!(error.starts_with("rpc-fault: net_peerCount: "), "{error}");
}

#[tokio::test]
async fn zero_quantities_decode_to_zero() {
    let node = ScriptedNode {
        block_number: Ok("0x0".to_string()),
        peer_count: Ok("0x".to_string()),
        ..ScriptedNode::healthy()
    };
    let doc = indicator(node).probe().await;

    assert_eq!(doc.status, HealthStatus::Up);
    assert_eq!(doc.details["blockNumber"], DetailValue::Quantity(U256::ZERO));
    assert_eq!(doc.details["netPeerCount"], DetailValue::Quantity(U256::ZERO));
}

#[tokio::test]
async fn repeated_probes_are_independent() {
    let health = indicator(ScriptedNode::healthy());
    let first = health.probe().await;
    let second = health.probe().await;
    assert_eq!(first, second);
    assert_eq!(first.status, HealthStatus::Up);
}

#[tokio::test]
async fn up_document_serializes_with_the_five_keys() {
    let doc = indicator(ScriptedNode::healthy()).probe().await;
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["status"], "up");
    let details = json["details"].as_object().unwrap();
    assert_eq!(details.len(), 5);
    assert_eq!(details["netVersion"], "23");
    assert_eq!(details["clientVersion"], "ClientVersion");
    assert_eq!(details["blockNumber"], "120");
    assert_eq!(details["protocolVersion"], "protocolVersion");
    assert_eq!(details["netPeerCount"], "80");
}

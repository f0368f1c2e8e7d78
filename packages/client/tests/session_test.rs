//! Integration tests: a chat session talking to a real relay server.

use std::{net::SocketAddr, time::Duration};

use roomchat_client::{
    ChatSession, ChatView, ConsoleView, Field, SessionPhase, apply_command,
    input::parse_input,
    websocket::{Inbound, WebSocketTransport, connect},
};
use roomchat_server::ui::Server;
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_secs(5);

type TestSession = ChatSession<WebSocketTransport, ConsoleView<Vec<u8>>>;

/// Start a server on an ephemeral port
async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(Server::in_memory().serve(listener, std::future::pending()));
    addr
}

async fn open_session(addr: SocketAddr) -> (TestSession, Inbound) {
    let (transport, inbound) = connect(&format!("ws://{}/ws", addr))
        .await
        .expect("Failed to connect");
    (
        ChatSession::new(transport, ConsoleView::new(Vec::new())),
        inbound,
    )
}

/// Dispatch the next inbound event to the session
async fn pump(session: &mut TestSession, inbound: &mut Inbound) {
    let event = tokio::time::timeout(TIMEOUT, inbound.recv())
        .await
        .expect("Timed out waiting for an event")
        .expect("Connection closed");
    session.handle_event(event);
}

fn join_form(session: &mut TestSession, username: &str, room: &str) {
    session
        .view_mut()
        .set_field(Field::Username, username.to_string());
    session.view_mut().set_field(Field::Room, room.to_string());
}

#[tokio::test]
async fn test_join_and_chat_between_two_sessions() {
    // テスト項目: 2 つのセッションが同じルームで参加通知とメッセージを受け取る
    // given (前提条件):
    let addr = start_server().await;
    let (mut alice, mut alice_inbound) = open_session(addr).await;
    let (mut bob, mut bob_inbound) = open_session(addr).await;

    join_form(&mut alice, "alice", "lobby");
    alice.join();
    pump(&mut alice, &mut alice_inbound).await;

    join_form(&mut bob, "bob", "lobby");
    bob.join();
    pump(&mut bob, &mut bob_inbound).await;
    pump(&mut alice, &mut alice_inbound).await;

    // when (操作):
    alice
        .view_mut()
        .set_field(Field::Message, "hi bob".to_string());
    alice.send();
    pump(&mut alice, &mut alice_inbound).await;
    pump(&mut bob, &mut bob_inbound).await;

    // then (期待する結果):
    assert_eq!(alice.phase(), SessionPhase::Joined);
    assert_eq!(alice.view().field_value(Field::Message), "");
    assert_eq!(
        alice.view().messages(),
        [
            "System: alice has joined the room.".to_string(),
            "System: bob has joined the room.".to_string(),
            "alice: hi bob".to_string(),
        ]
    );
    assert_eq!(
        bob.view().messages(),
        [
            "System: bob has joined the room.".to_string(),
            "alice: hi bob".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_send_before_join_is_rejected_by_server_not_client() {
    // テスト項目: join 前の送信はクライアントでは止められず、サーバーの error も表示されない
    // given (前提条件):
    let addr = start_server().await;
    let (mut alice, mut alice_inbound) = open_session(addr).await;

    // when (操作):
    let _ = apply_command(&mut alice, parse_input("anyone here?"));
    pump(&mut alice, &mut alice_inbound).await;

    // then (期待する結果):
    assert_eq!(alice.phase(), SessionPhase::NotJoined);
    assert!(alice.view().messages().is_empty());
    assert!(!alice.view().is_chat_visible());
}

#[tokio::test]
async fn test_send_uses_joined_identity_after_form_changes() {
    // テスト項目: join 後にフォームを書き換えても join 時のユーザー名で配信される
    // given (前提条件):
    let addr = start_server().await;
    let (mut alice, mut alice_inbound) = open_session(addr).await;
    let _ = apply_command(&mut alice, parse_input("/join alice lobby"));
    pump(&mut alice, &mut alice_inbound).await;
    join_form(&mut alice, "mallory", "elsewhere");

    // when (操作):
    let _ = apply_command(&mut alice, parse_input("it's me"));
    pump(&mut alice, &mut alice_inbound).await;

    // then (期待する結果):
    assert_eq!(
        alice.view().messages().last().map(String::as_str),
        Some("alice: it's me")
    );
}

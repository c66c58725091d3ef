//! Settings files feeding a running engine

use std::time::Duration;

use strangerchat_app::config::{self, CONFIG_FILENAME};
use strangerchat_app::message::Message;
use strangerchat_app::{Engine, ScriptedRandom};
use tempfile::tempdir;

#[tokio::test(start_paused = true)]
async fn silent_humans_from_config_never_reply() {
    let temp = tempdir().unwrap();
    let path = temp.path().join(CONFIG_FILENAME);
    std::fs::write(
        &path,
        "[timing]\nsearch_delay_ms = 100\n\n[odds]\nhuman_reply = 0.0\nincoming_call = 0.0\n",
    )
    .unwrap();

    let settings = config::load_settings(&path);
    assert_eq!(settings.timing.search_delay_ms, 100);

    let mut engine = Engine::new(settings, Box::new(ScriptedRandom::new([0.0])));
    engine.process_message(Message::FindMatch);

    tokio::time::sleep(Duration::from_millis(150)).await;
    engine.drain_pending_messages();
    assert!(engine.state.session.is_connected());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    engine.drain_pending_messages();
    assert_eq!(engine.state.session.transcript.len(), 1);

    engine.process_message(Message::SendMessage {
        text: "anyone there?".to_string(),
    });
    tokio::time::sleep(Duration::from_secs(5)).await;
    engine.drain_pending_messages();

    // Greeting plus our message, no reply
    assert_eq!(engine.state.session.transcript.len(), 2);
}

#[test]
fn init_config_writes_loadable_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("strangerchat").join(CONFIG_FILENAME);

    assert!(config::init_config_file(&path).unwrap());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[timing]"));
    assert!(written.contains("session_length_secs = 300"));
    assert_eq!(config::load_settings(&path), config::Settings::default());
}

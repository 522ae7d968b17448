use std::collections::VecDeque;

use pretty_assertions::assert_eq;
use superloop::Task;

use crate::display::CharacterLcd;
use crate::*;

/// Link that hands out scripted messages and records everything it is asked.
#[derive(Default)]
struct ScriptedLink {
    reject_config: bool,
    inbox: VecDeque<LinkMessage>,
    configured: Option<LinkConfig>,
    opened: bool,
    calls: usize,
    broadcasts: Vec<BroadcastPayload>,
}

impl LinkGateway for ScriptedLink {
    type Error = ();

    fn configure(&mut self, setup: &LinkConfig) -> Result<(), Self::Error> {
        self.calls += 1;
        if self.reject_config {
            return Err(());
        }
        self.configured = Some(*setup);
        Ok(())
    }

    fn open(&mut self) {
        self.calls += 1;
        self.opened = true;
    }

    fn try_read(&mut self) -> Option<LinkMessage> {
        self.calls += 1;
        self.inbox.pop_front()
    }

    fn queue_broadcast(&mut self, payload: &BroadcastPayload) {
        self.calls += 1;
        self.broadcasts.push(*payload);
    }
}

#[derive(Default)]
struct ScriptedButtons {
    pressed: [bool; 4],
    queries: Vec<ButtonId>,
}

impl ButtonGateway for ScriptedButtons {
    fn is_pressed(&mut self, button: ButtonId) -> bool {
        self.queries.push(button);
        self.pressed[button.index()]
    }
}

#[derive(Default)]
struct RecordingDisplay {
    lcd: CharacterLcd,
    calls: usize,
}

impl DisplayGateway for RecordingDisplay {
    fn clear_region(&mut self, start: u8, len: u8) {
        self.calls += 1;
        self.lcd.clear_region(start, len);
    }

    fn write_text(&mut self, start: u8, text: &[u8]) {
        self.calls += 1;
        self.lcd.write_text(start, text);
    }
}

type TestTask = DrumTriggerTask<ScriptedLink, ScriptedButtons, RecordingDisplay>;

macro_rules! setup {
    ($task:ident) => {
        setup!($task, TriggerConfig::DRUMSET, ScriptedLink::default());
    };
    ($task:ident, $config:expr, $link:expr) => {
        #[allow(unused_mut)]
        let mut $task: TestTask = DrumTriggerTask::new(
            $config,
            $link,
            ScriptedButtons::default(),
            RecordingDisplay::default(),
        );
        $task.initialize();
    };
}

fn line(task: &TestTask, line: usize) -> String {
    String::from_utf8_lossy(task.display().lcd.line(line))
        .trim_end()
        .to_string()
}

#[test]
fn initialize_opens_link_and_draws_prompts() {
    setup!(task);

    assert_eq!(task.state(), Some(DrumState::SampleButtons));
    assert_eq!(task.link().configured, Some(TriggerConfig::DRUMSET.link));
    assert!(task.link().opened);
    assert_eq!(line(&task, 0), "Push Button to Start");
    assert_eq!(line(&task, 1), "Bass HiHat Tom Snare");
}

#[test]
fn template_preset_only_changes_the_legend() {
    setup!(task, TriggerConfig::TEMPLATE, ScriptedLink::default());

    assert_eq!(task.state(), Some(DrumState::SampleButtons));
    assert_eq!(line(&task, 0), "Push Button to Start");
    assert_eq!(line(&task, 1), "BassHiHatCrashSnare");
}

#[test]
fn failed_configuration_leaves_task_inert() {
    let link = ScriptedLink {
        reject_config: true,
        inbox: VecDeque::from([LinkMessage::Tick, LinkMessage::data(b"hello")]),
        ..Default::default()
    };
    setup!(task, TriggerConfig::DRUMSET, link);
    task.buttons_mut().pressed = [true; 4];

    assert_eq!(task.state(), Some(DrumState::FailedInit));
    assert_eq!(task.link().calls, 1);
    assert!(!task.link().opened);
    assert_eq!(task.display().calls, 0);

    for _ in 0..100 {
        task.run_active_state();
    }

    assert_eq!(task.state(), Some(DrumState::FailedInit));
    assert_eq!(task.link().calls, 1);
    assert_eq!(task.link().inbox.len(), 2);
    assert!(task.link().broadcasts.is_empty());
    assert!(task.buttons_mut().queries.is_empty());
    assert_eq!(task.display().calls, 0);
}

#[test]
fn ticks_before_initialize_do_nothing() {
    let mut task: TestTask = DrumTriggerTask::new(
        TriggerConfig::DRUMSET,
        ScriptedLink::default(),
        ScriptedButtons::default(),
        RecordingDisplay::default(),
    );

    task.run_active_state();

    assert_eq!(task.state(), None);
    assert_eq!(task.link().calls, 0);
    assert_eq!(task.display().calls, 0);
}

#[test]
fn second_initialize_is_ignored() {
    setup!(task);
    let calls = task.link().calls;

    task.initialize();

    assert_eq!(task.link().calls, calls);
    assert_eq!(task.state(), Some(DrumState::SampleButtons));
}

#[test]
fn empty_read_skips_sampling_and_broadcast() {
    setup!(task);
    task.buttons_mut().pressed = [true, false, false, true];

    task.run_active_state();

    assert!(task.link().broadcasts.is_empty());
    assert!(task.buttons_mut().queries.is_empty());
    assert!(!task.redraw_pending());
}

#[test]
fn bass_press_broadcasts_and_arms_redraw() {
    setup!(task);
    task.buttons_mut().pressed = [true, false, false, false];
    task.link_mut().inbox.push_back(LinkMessage::data(b"song 01!"));

    task.run_active_state();

    assert_eq!(
        task.link().broadcasts,
        [BroadcastPayload::from_bytes([0x01, 0, 0, 0, 0, 0, 0, 0])]
    );
    assert_eq!(
        task.buttons_mut().queries,
        [
            ButtonId::Button0,
            ButtonId::Button1,
            ButtonId::Button2,
            ButtonId::Button3
        ]
    );
    assert!(task.redraw_pending());
    assert_eq!(line(&task, 0), "Push Button to Start");
    assert_eq!(line(&task, 1), "song 01!at Tom Snare");
}

#[test]
fn armed_redraw_draws_stop_prompt_on_next_tick() {
    setup!(task);
    task.buttons_mut().pressed = [false, false, true, false];
    task.link_mut().inbox.push_back(LinkMessage::Tick);
    task.run_active_state();
    assert!(task.redraw_pending());

    task.buttons_mut().pressed = [false; 4];
    task.run_active_state();

    assert_eq!(line(&task, 0), "To stop press all");
    assert!(!task.redraw_pending());
    // the redraw happens even though nothing was read this tick
    assert_eq!(task.link().broadcasts.len(), 1);
}

#[test]
fn redraw_precedes_button_processing() {
    setup!(task);
    task.buttons_mut().pressed = [false, true, false, false];
    task.link_mut().inbox.push_back(LinkMessage::Tick);
    task.link_mut().inbox.push_back(LinkMessage::Tick);

    task.run_active_state();
    task.run_active_state();

    // second tick consumed the flag then set it again from the held pad
    assert_eq!(line(&task, 0), "To stop press all");
    assert!(task.redraw_pending());
    assert_eq!(task.link().broadcasts.len(), 2);
}

#[test]
fn tick_messages_count_in_the_payload() {
    setup!(task);
    task.link_mut().inbox.extend((0..256).map(|_| LinkMessage::Tick));

    for _ in 0..256 {
        task.run_active_state();
    }

    let broadcasts = &task.link().broadcasts;
    assert_eq!(broadcasts.len(), 256);
    assert_eq!(broadcasts[0].as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 0x01]);
    assert_eq!(broadcasts[254].as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 0xff]);
    assert_eq!(broadcasts[255].as_bytes(), &[0, 0, 0, 0, 0, 0, 0x01, 0x00]);
    assert_eq!(task.payload(), broadcasts[255]);
}

#[test]
fn data_messages_are_mirrored_with_filler() {
    setup!(task);
    task.link_mut().inbox.push_back(LinkMessage::data(b"abc"));

    task.run_active_state();

    assert_eq!(&task.display().lcd.line(1)[..8], b"abcxxxxx");
    assert_eq!(task.link().broadcasts, [BroadcastPayload::new()]);
}

#[test]
fn await_begin_holds_until_a_pad_is_pressed() {
    let config = TriggerConfig {
        await_first_press: true,
        ..TriggerConfig::DRUMSET
    };
    setup!(task, config, ScriptedLink::default());
    task.link_mut().inbox.push_back(LinkMessage::Tick);
    assert_eq!(task.state(), Some(DrumState::AwaitBegin));

    task.run_active_state();
    assert_eq!(task.state(), Some(DrumState::AwaitBegin));
    assert_eq!(task.link().inbox.len(), 1);

    task.buttons_mut().pressed = [false, false, false, true];
    task.run_active_state();
    assert_eq!(task.state(), Some(DrumState::SampleButtons));
    assert!(task.link().broadcasts.is_empty());

    task.run_active_state();
    assert_eq!(
        task.link().broadcasts,
        [BroadcastPayload::from_bytes([0, 0, 0, 0x01, 0, 0, 0, 0x01])]
    );
}

#[test]
fn custom_pad_mapping_reorders_payload_bytes() {
    let config = TriggerConfig {
        pads: [
            ButtonId::Button3,
            ButtonId::Button2,
            ButtonId::Button1,
            ButtonId::Button0,
        ],
        ..TriggerConfig::DRUMSET
    };
    setup!(task, config, ScriptedLink::default());
    task.buttons_mut().pressed = [true, false, false, false];
    task.link_mut().inbox.push_back(LinkMessage::data(b""));

    task.run_active_state();

    assert_eq!(task.payload().as_bytes(), &[0, 0, 0, 0x01, 0, 0, 0, 0]);
}

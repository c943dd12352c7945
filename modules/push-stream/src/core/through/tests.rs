use super::Through;
use crate::core::{Sink, Source, Stage, StageFlags, StageShared, compose};

fn upper(text: String) -> String {
  text.to_uppercase()
}

#[test]
fn starts_paused() {
  let through = Through::new(upper);
  assert!(through.is_paused());
  assert!(!through.has_sink());
}

#[test]
fn write_without_sink_is_a_no_op() {
  let calls = core::cell::Cell::new(0);
  let through = Through::new(|text: String| {
    calls.set(calls.get() + 1);
    text
  });
  let before = through.flags();

  assert_eq!(through.write("paper".into()), 0);

  assert_eq!(through.flags(), before);
  assert_eq!(calls.get(), 0);
}

#[test]
fn write_returns_the_original_item_size() {
  let through = StageShared::new(Through::new(|text: String| text.repeat(3)));
  let sink = StageShared::new(Sink::new());
  compose(&through, &sink);

  assert_eq!(through.write("ab".into()), 2);
  assert_eq!(sink.items(), vec!["ababab".to_string()]);
}

#[test]
fn pipe_adopts_the_downstream_pause() {
  let through = StageShared::new(Through::new(upper));
  let sink = StageShared::new(Sink::new());
  sink.pause();

  compose(&through, &sink);

  assert_eq!(through.flags(), StageFlags { ended: false, aborted: false, paused: true, has_sink: true });
}

#[test]
fn source_waits_for_through_to_be_linked() {
  let source = StageShared::new(Source::new(["paper".to_string(), "clips".to_string()]));
  let through = StageShared::new(Through::new(upper));
  let sink = StageShared::new(Sink::new());

  compose(&source, &through);
  assert_eq!(source.emitted(), 0);

  compose(&through, &sink);
  assert_eq!(sink.items(), vec!["PAPER".to_string(), "CLIPS".to_string()]);
  assert!(through.is_ended());
  assert!(sink.is_ended());
}

#[test]
fn resume_without_sink_keeps_the_pause() {
  let source = StageShared::new(Source::new([1_u32]));
  let through = StageShared::new(Through::new(|value: u32| value + 1));
  compose(&source, &through);

  assert!(!through.resume());
  assert!(through.is_paused());
  assert_eq!(source.remaining(), 1);
}

#[test]
fn end_propagates_downstream() {
  let through = StageShared::new(Through::new(|value: u32| value));
  let sink = StageShared::new(Sink::new());
  compose(&through, &sink);

  assert!(through.end());
  assert!(sink.is_ended());
  assert!(!through.end());
  assert_eq!(through.write(1), 0);
}

#[test]
fn downstream_pause_is_copied_into_the_own_flag() {
  let through = StageShared::new(Through::new(upper));
  let sink = StageShared::new(Sink::new());
  compose(&through, &sink);
  assert!(!through.is_paused());

  sink.pause();

  assert!(through.core().is_paused());
  assert!(through.is_paused());
}

#[test]
fn pause_is_reported_one_hop_only() {
  let first = StageShared::new(Through::new(|value: u32| value + 1));
  let second = StageShared::new(Through::new(|value: u32| value * 2));
  let sink = StageShared::new(Sink::new());
  compose(&second, &sink);
  compose(&first, &second);

  sink.pause();

  assert!(second.is_paused());
  assert!(!first.is_paused());
}

use std::{cell::RefCell, rc::Rc};

use push_stream_rs::core::{Sink, Source, Stage, StageCore, StageFlags, StageKind, StageShared, Through, compose};

fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_env_filter("push_stream=trace").with_test_writer().try_init();
}

fn words() -> Vec<String> {
  ["paper", "clips", "for", "sale"].into_iter().map(String::from).collect()
}

fn uppercase(text: String) -> String {
  text.to_uppercase()
}

#[test]
fn source_to_sink_delivers_everything_in_order() {
  init_tracing();
  let source = StageShared::new(Source::new(words()));
  let sink = StageShared::new(Sink::new());
  assert!(!sink.is_ended());

  source.pipe_to(&sink);

  assert_eq!(sink.items(), ["paper", "clips", "for", "sale"]);
  assert!(sink.is_ended());
}

#[test]
fn source_through_sink_applies_the_transform() {
  init_tracing();
  let source = StageShared::new(Source::new(words()));
  let through = StageShared::new(Through::new(uppercase));
  let sink = StageShared::new(Sink::new());
  assert!(!sink.is_ended());

  source.pipe_to(&through).pipe_to(&sink);

  assert_eq!(sink.len(), 4);
  assert_eq!(sink.items(), ["PAPER", "CLIPS", "FOR", "SALE"]);
  assert!(sink.is_ended());
}

#[test]
fn transform_fidelity_holds_for_every_position() {
  let input: Vec<u64> = (0..100).collect();
  let source = StageShared::new(Source::new(input.clone()));
  let through = StageShared::new(Through::new(|value: u64| value * value + 1));
  let sink = StageShared::new(Sink::new());

  compose(&compose(&source, &through), &sink);

  let expected: Vec<u64> = input.iter().map(|value| value * value + 1).collect();
  assert_eq!(sink.items(), expected);
  assert!(sink.is_ended());
}

#[test]
fn two_throughs_compose_their_transforms_in_order() {
  init_tracing();
  let source = StageShared::new(Source::new(words()));
  let first = StageShared::new(Through::new(uppercase));
  let second = StageShared::new(Through::new(|text: String| format!("{text}!")));
  let sink = StageShared::new(Sink::new());

  source.pipe_to(&first).pipe_to(&second).pipe_to(&sink);

  assert_eq!(sink.items(), ["PAPER!", "CLIPS!", "FOR!", "SALE!"]);
  assert!(first.is_ended());
  assert!(second.is_ended());
  assert!(sink.is_ended());
}

#[test]
fn sink_pause_is_visible_only_to_its_adjacent_through() {
  let first = StageShared::new(Through::new(|value: u32| value + 1));
  let second = StageShared::new(Through::new(|value: u32| value * 2));
  let sink = StageShared::new(Sink::new());
  second.pipe_to(&sink);
  first.pipe_to(&second);
  sink.pause();

  assert_eq!(second.flags(), StageFlags { ended: false, aborted: false, paused: true, has_sink: true });
  assert_eq!(first.flags(), StageFlags { ended: false, aborted: false, paused: false, has_sink: true });

  let source = StageShared::new(Source::new([1_u32, 2, 3]));
  source.pipe_to(&first);

  assert_eq!(source.emitted(), 3);
  assert_eq!(sink.items(), vec![4, 6, 8]);
  assert!(sink.is_ended());
}

#[test]
fn pause_behind_two_throughs_stops_the_nearest_one_and_resume_drains() {
  let source = StageShared::new(Source::new(words()));
  let first = StageShared::new(Through::new(uppercase));
  let second = StageShared::new(Through::new(|text: String| text));
  let sink = StageShared::new(Sink::new());
  sink.pause();

  source.pipe_to(&first).pipe_to(&second).pipe_to(&sink);
  assert!(second.is_paused());
  assert_eq!(source.emitted(), 0);

  assert!(sink.resume());
  assert_eq!(sink.items(), ["PAPER", "CLIPS", "FOR", "SALE"]);
  assert!(sink.is_ended());
}

#[test]
fn write_without_sink_leaves_flags_untouched() {
  let through = Through::new(uppercase);
  let source = Source::new(words());
  let through_flags = through.flags();
  let source_flags = source.flags();

  assert_eq!(through.write("paper".into()), 0);
  assert_eq!(source.write("paper".into()), 0);

  assert_eq!(through.flags(), through_flags);
  assert_eq!(source.flags(), source_flags);
  assert!(!through_flags.has_sink);
}

#[test]
fn paused_sink_halts_delivery_until_resumed() {
  let source = StageShared::new(Source::new(words()));
  let sink = StageShared::new(Sink::new());
  sink.pause();

  source.pipe_to(&sink);
  assert!(sink.is_empty());
  assert!(source.resume());
  assert!(sink.is_empty());
  assert_eq!(source.emitted(), 0);

  assert!(sink.resume());
  assert_eq!(sink.items(), ["paper", "clips", "for", "sale"]);
  assert!(sink.is_ended());
}

#[test]
fn paused_sink_behind_a_through_halts_delivery() {
  let source = StageShared::new(Source::new(words()));
  let through = StageShared::new(Through::new(uppercase));
  let sink = StageShared::new(Sink::new());
  sink.pause();

  source.pipe_to(&through).pipe_to(&sink);
  assert!(sink.is_empty());
  assert_eq!(through.flags(), StageFlags { ended: false, aborted: false, paused: true, has_sink: true });

  assert!(sink.resume());
  assert_eq!(sink.items(), ["PAPER", "CLIPS", "FOR", "SALE"]);
  assert!(through.is_ended());
}

struct ThrottledSink {
  core:     StageCore<String>,
  received: RefCell<Vec<String>>,
  batch:    usize,
}

impl ThrottledSink {
  fn new(batch: usize) -> Self {
    Self { core: StageCore::new(StageKind::Custom), received: RefCell::new(Vec::new()), batch }
  }

  fn received(&self) -> Vec<String> {
    self.received.borrow().clone()
  }
}

impl Stage for ThrottledSink {
  type Item = String;

  fn core(&self) -> &StageCore<String> {
    &self.core
  }

  fn write(&self, item: String) -> usize {
    let size = item.len();
    let count = {
      let mut received = self.received.borrow_mut();
      received.push(item);
      received.len()
    };
    if count % self.batch == 0 {
      self.pause();
    }
    size
  }

  fn resume(&self) -> bool {
    self.core.set_paused(false);
    self.core.upstream().is_some_and(|upstream| upstream.resume())
  }
}

#[test]
fn pause_raised_mid_stream_takes_effect_before_the_next_item() {
  init_tracing();
  let source = StageShared::new(Source::new(words()));
  let through = StageShared::new(Through::new(uppercase));
  let sink = StageShared::new(ThrottledSink::new(3));

  source.pipe_to(&through).pipe_to(&sink);
  assert_eq!(sink.received(), ["PAPER", "CLIPS", "FOR"]);
  assert_eq!(source.remaining(), 1);
  assert!(!sink.is_ended());

  assert!(sink.resume());
  assert_eq!(sink.received(), ["PAPER", "CLIPS", "FOR", "SALE"]);
  assert!(sink.is_ended());
}

#[test]
fn repeated_end_does_not_propagate_twice() {
  let ends = Rc::new(RefCell::new(0_usize));

  struct CountingEnd {
    core: StageCore<u32>,
    ends: Rc<RefCell<usize>>,
  }

  impl Stage for CountingEnd {
    type Item = u32;

    fn core(&self) -> &StageCore<u32> {
      &self.core
    }

    fn end(&self) -> bool {
      *self.ends.borrow_mut() += 1;
      self.core.mark_ended()
    }
  }

  let through = StageShared::new(Through::new(|value: u32| value));
  let counter = StageShared::new(CountingEnd { core: StageCore::new(StageKind::Custom), ends: ends.clone() });
  through.pipe_to(&counter);

  assert!(through.end());
  assert!(!through.end());
  assert_eq!(*ends.borrow(), 1);
}

//! Minimal Source -> Through -> Sink pipeline.

use push_stream_rs::core::{Sink, Source, Stage, StageShared, Through};

fn main() {
  let source = StageShared::new(Source::new(["paper", "clips", "for", "sale"].map(String::from)));
  let through = StageShared::new(Through::new(|word: String| word.to_uppercase()));
  let sink = StageShared::new(Sink::new());

  source.pipe_to(&through).pipe_to(&sink);

  println!("received {:?} (ended: {})", sink.items(), sink.is_ended());
}

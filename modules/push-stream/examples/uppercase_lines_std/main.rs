//! Streams the lines of a file through an uppercasing transform.
//!
//! Usage: `cargo run --example uppercase_lines_std -- <path>`

use push_stream_rs::{
  core::{Sink, Stage, StageShared, Through},
  std::{LineReaderConfig, open_line_source},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
  tracing_subscriber::fmt().with_env_filter("push_stream=debug").init();

  let Some(path) = std::env::args().nth(1) else {
    eprintln!("usage: uppercase_lines_std <path>");
    return;
  };

  let source = open_line_source(&path, LineReaderConfig::default().with_skip_blank_lines(true)).await;
  let through = StageShared::new(Through::new(|line: String| line.to_uppercase()));
  let sink = StageShared::new(Sink::new());

  source.pipe_to(&through).pipe_to(&sink);
  source.resume_async().await;

  for line in sink.take_items() {
    println!("{line}");
  }
  println!("ended: {}, reads: {}", sink.is_ended(), source.reads_issued());
}

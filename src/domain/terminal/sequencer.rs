use super::output::OutputSink;
use std::time::Duration;

pub const TRAIN_TOTAL_FRAMES: usize = 50;
pub const TRAIN_FRAME_DELAY: Duration = Duration::from_millis(100);
pub const TRAIN_FINALE: &str = "\nChoo choo!";

pub const TRAIN_FRAMES: [&str; 4] = [
    r"
                                        ++      +------ 
                                        ||      |+-+ |  
                                      /---------|| | |  
                                     + ========  +-+ |  
                                    _|--/~\------/~\-+  
                                   //// \_/      \_/    
",
    r"
                              ++      +------ 
                              ||      |+-+ |  
                            /---------|| | |  
                           + ========  +-+ |  
                          _|--/~\------/~\-+  
                         //// \_/      \_/    
",
    r"
                    ++      +------ 
                    ||      |+-+ |  
                  /---------|| | |  
                 + ========  +-+ |  
                _|--/~\------/~\-+  
               //// \_/      \_/    
",
    r"
          ++      +------ 
          ||      |+-+ |  
        /---------|| | |  
       + ========  +-+ |  
      _|--/~\------/~\-+  
     //// \_/      \_/    
",
];

/// What the driver should do after a call to [`Sequencer::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A frame is on screen; call `advance` again after the delay.
    Wait(Duration),
    /// The finale has been written. Further calls are no-ops.
    Finished,
}

/// Frame-by-frame playback of a looping animation.
///
/// The sequencer never sleeps itself. Each `advance` replaces the sink
/// content with the next frame and hands the delay back to whoever owns the
/// clock, so the event loop keeps running between frames. Once started it
/// always plays `total` frames and then appends the finale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    frames: &'static [&'static str],
    total: usize,
    delay: Duration,
    finale: &'static str,
    rendered: usize,
    finished: bool,
}

impl Sequencer {
    #[must_use]
    pub fn new(
        frames: &'static [&'static str],
        total: usize,
        delay: Duration,
        finale: &'static str,
    ) -> Self {
        Self {
            frames,
            total,
            delay,
            finale,
            rendered: 0,
            finished: false,
        }
    }

    /// The `sl` easter egg.
    #[must_use]
    pub fn train() -> Self {
        Self::new(
            &TRAIN_FRAMES,
            TRAIN_TOTAL_FRAMES,
            TRAIN_FRAME_DELAY,
            TRAIN_FINALE,
        )
    }

    pub fn advance(&mut self, sink: &mut OutputSink) -> Step {
        if self.finished {
            return Step::Finished;
        }

        if self.rendered < self.total && !self.frames.is_empty() {
            let frame = self.frames[self.rendered % self.frames.len()];
            sink.clear();
            sink.print(frame);
            self.rendered += 1;
            return Step::Wait(self.delay);
        }

        sink.print(self.finale);
        self.finished = true;
        Step::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_plays_fifty_frames_then_finale() {
        let mut sink = OutputSink::new();
        let mut sequencer = Sequencer::train();
        let mut shown = Vec::new();
        let mut waits = 0;

        loop {
            match sequencer.advance(&mut sink) {
                Step::Wait(delay) => {
                    assert_eq!(delay, TRAIN_FRAME_DELAY);
                    waits += 1;
                    // Each frame replaces whatever was there before
                    assert_eq!(sink.len(), 1);
                    let index = TRAIN_FRAMES
                        .iter()
                        .position(|f| *f == sink.lines()[0].text)
                        .unwrap();
                    shown.push(index);
                }
                Step::Finished => break,
            }
        }

        assert_eq!(waits, 50);
        let expected: Vec<usize> = (0..50).map(|i| i % 4).collect();
        assert_eq!(shown, expected);

        // Last frame stays, finale is appended without clearing
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines()[0].text, TRAIN_FRAMES[1]);
        assert_eq!(sink.lines()[1].text, "\nChoo choo!");
        assert!(!sink.lines()[1].is_error);
    }

    #[test]
    fn test_advance_after_finish_is_noop() {
        let mut sink = OutputSink::new();
        let mut sequencer = Sequencer::new(&TRAIN_FRAMES, 1, Duration::from_millis(5), "done");
        assert_eq!(sequencer.advance(&mut sink), Step::Wait(Duration::from_millis(5)));
        assert_eq!(sequencer.advance(&mut sink), Step::Finished);
        assert_eq!(sink.len(), 2);

        let before = sink.clone();
        assert_eq!(sequencer.advance(&mut sink), Step::Finished);
        assert_eq!(sink, before);
    }

    #[test]
    fn test_empty_frame_set_goes_straight_to_finale() {
        let mut sink = OutputSink::new();
        sink.print("kept");
        let mut sequencer = Sequencer::new(&[], 10, Duration::from_millis(1), "end");
        assert_eq!(sequencer.advance(&mut sink), Step::Finished);
        assert_eq!(sink.len(), 2);
    }
}

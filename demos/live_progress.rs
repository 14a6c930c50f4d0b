use std::sync::mpsc;
use std::thread;

use simpletron::{ChannelObserver, EpochStats, Perceptron};

// Trains on the main thread while a second thread renders progress,
// the same wiring a GUI or SSE endpoint would use.
fn main() {
    let (tx, rx) = mpsc::channel::<EpochStats>();

    let reporter = thread::spawn(move || {
        for stats in rx {
            println!(
                "epoch {:>2} | prediction {:.1} | target {:.1} | loss {:.4}",
                stats.epoch, stats.prediction, stats.target, stats.loss
            );
        }
    });

    let x = vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0];
    let y = vec![0.0, 0.0, 0.0, 1.0];

    let mut unit = Perceptron::new(2).expect("two features");
    let mut observer = ChannelObserver::new(tx);
    for _ in 0..5 {
        unit.fit_observed(&x, &y, &mut observer)
            .expect("well-formed training data");
    }
    drop(observer);

    reporter.join().expect("reporter thread");
}

//! Replicates a whole simulated dataset.
//!
//! Each trial builds a complete two-column frame. Frames have no
//! rectangular numeric form, so even under `Collect::Simplify` the
//! results stay in list form: one frame per trial.

use reprise_components::{
    frame::{Column, Frame},
    rep::{Options, rep},
    sample::NormalDraws,
};
use reprise_core::{Collect, Stream, Trial, replicate};

fn main() {
    let mut stream = Stream::seeded(99);

    let mut weights = NormalDraws::new(6, [62.0, 74.0], 8.0).unwrap();
    let mut simulate_dataset = |stream: &mut Stream| {
        let groups = rep(
            &["female", "male"],
            &Options {
                length_out: Some(6),
                ..Options::default()
            },
        )
        .expect("no per-element counts to mismatch");

        weights.run(stream).map(|draws| {
            Frame::new([
                ("sex", Column::labels(groups)),
                ("weight", Column::Numeric(draws)),
            ])
            .expect("columns are drawn to equal length")
        })
    };

    let results = replicate(3, &mut simulate_dataset, Collect::Simplify, &mut stream).unwrap();
    let frames = results.as_trials().unwrap();

    for (index, frame) in frames.iter().enumerate() {
        println!("====== Simulated dataset {index} ======");
        println!("{frame}");
    }
}

//! Simulates a two-group dataset in one pass.
//!
//! Group labels alternate via `rep`, and the cycled mean parameter lines
//! up with them: even draws come from the control distribution, odd
//! draws from the treated one.

use reprise_components::{
    frame::{Column, Frame},
    rep::{Options, Times, rep},
    sample::NormalDraws,
};
use reprise_core::{Stream, Trial};

fn main() {
    let mut stream = Stream::seeded(2024);

    let groups = rep(
        &["control", "treated"],
        &Options {
            times: Times::Whole(6),
            ..Options::default()
        },
    )
    .unwrap();

    // Means cycle [170, 175], matching the alternating labels.
    let mut heights = NormalDraws::new(12, [170.0, 175.0], 10.0).unwrap();
    let draws = heights.run(&mut stream).unwrap();

    let frame = Frame::new([
        ("group", Column::labels(groups)),
        ("height", Column::Numeric(draws)),
    ])
    .unwrap();

    println!("====== Simulated heights ======");
    println!("{frame}");
}

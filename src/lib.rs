#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `mcpi` estimates $\pi$ with [Monte Carlo] rejection sampling and measures how the
//! accuracy of that estimate improves with the number of samples.
//!
//! Points are drawn uniformly from a box attached to a circle and the fraction of points inside
//! the circle is turned into an estimate of $\pi$. An experiment repeats this for a list of
//! increasing sample sizes (a *series*), runs several series and reports the relative errors.
//!
//! # Features
//!
//! - **Explicit random number generators**. Every function that samples takes the generator as an
//! argument. Every generator that implements the `Rng` trait from the `rand` crate can be used;
//! the binary uses `Pcg64` from `rand_pcg`.
//! - **Reproducibility**. Every series stores the state of the generator before and after it was
//! produced, so it can be replayed exactly with [`harness::replay_series`].
//! - **Stream modes**. Series either consume one generator one after another, or each get their
//! own generator, see [`StreamMode`].
//! - **Pluggable progress**. Estimations report their progress to a [`callbacks::Progress`] sink,
//! which can be a terminal line, log records or nothing.
//!
//! # What is ...?
//!
//! Given a circle with center $(x_0, y_0)$ and radius $r$, points are sampled in the square
//! $[x_0, x_0 + r] \times [y_0, y_0 + r]$, which contains one quarter of the circle. With
//! $N_\mathrm{in}$ of $N$ points inside the circle
//!
//! $$ \pi \approx 4 \frac{N_\mathrm{in}}{N} $$
//!
//! We use the following terms:
//!
//! - the *sample size* $N$ is the number of points drawn for one estimate,
//! - a *series* is one estimate for each sample size of a fixed list,
//! - the *relative error* of an estimate $e$ is $|e - \pi| / \pi$,
//! - the *accumulated error* of a series is the sum (not the mean) of the relative errors of its
//! estimates,
//! - the *average error curve* is, for every sample size, the relative error of the estimate
//! averaged over all series.
//!
//! [Monte Carlo]: https://en.wikipedia.org/wiki/Monte_Carlo_method

pub mod analysis;
pub mod callbacks;
pub mod config;
pub mod core;
pub mod error;
pub mod experiment;
pub mod geometry;
pub mod harness;
pub mod integrators;
pub mod report;

pub use crate::core::*;
pub use crate::error::{Error, Result};

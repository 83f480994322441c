//! # compare-matrices
//!
//! Mantel test between two numeric matrices, reporting the Spearman and Pearson
//! variants of the statistic.
//!
//! The crate is split into a small loader for whitespace-delimited matrix files
//! and a statistics layer that correlates the off-diagonal cells of two square
//! matrices and assesses the correlation by permuting the rows and columns of
//! the first one.
//!
//! ## Quick Start
//!
//! Load both matrices with [`io::load_matrix`] and call
//! [`MatrixMantelTests::mantel_both`](testing::inference::MatrixMantelTests::mantel_both)
//! with a [`MantelConfig`](testing::MantelConfig).
//!
//! ## Module Organization
//!
//! - **[`io`]**: Matrix file parsing
//! - **[`testing`]**: Correlation kernels, the Mantel permutation test and its result types

pub mod io;
pub mod testing;

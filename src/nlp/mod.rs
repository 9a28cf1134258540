//! Natural language processing components
//!
//! This module provides word segmentation and stopword filtering.

pub mod segmenter;
pub mod stopwords;

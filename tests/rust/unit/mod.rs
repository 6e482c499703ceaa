//! Unit tests - Tests of the judge through its public API, no external dependencies

mod judge_invariance_tests;

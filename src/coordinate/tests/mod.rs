//! Unit tests for the coordinate module

mod geo_math_tests;
mod point_tests;

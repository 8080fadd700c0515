#![allow(dead_code)]

pub mod output;
pub mod tracker_env;
pub mod wav;

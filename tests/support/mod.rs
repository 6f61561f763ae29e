#![allow(dead_code)]

pub mod http;
pub mod severity_env;

// Quiet diesel warnings https://github.com/diesel-rs/diesel/issues/1785
#![allow(proc_macro_derive_resolution_fallback)]
#![deny(unreachable_patterns)]
#![deny(unknown_lints)]
#![deny(unused_must_use)]
extern crate chrono;
extern crate diesel;
extern crate dotenv;
extern crate serde_json;
extern crate uuid;
extern crate validator;
extern crate vamos_db;

mod support;
mod unit;

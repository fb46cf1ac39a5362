#[allow(unused)]
#[path = "../support/mod.rs"]
mod support;

mod errors;
mod filtering;
mod paging;
mod sorting;

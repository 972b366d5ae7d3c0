#![allow(dead_code)]

use formstate::form::FormModel;

#[derive(FormModel)]
struct Wrapper<T> {
    value: T,
}

fn main() {}

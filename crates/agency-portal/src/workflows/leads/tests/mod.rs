mod bands;
mod common;

pub mod number_utils;

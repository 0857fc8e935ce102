/// Screen module exports

pub mod results;

pub use results::{Activation, ResultsScreen, ResultsState, ResultsTab};

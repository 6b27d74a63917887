/// Scene parse command.
pub mod parse;
/// Schema table listing command.
pub mod tags;

mod util;

#[cfg(test)]
mod test_support;

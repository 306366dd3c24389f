pub mod cell;
pub mod grid;
pub mod gridview;
pub mod store;

#[cfg(test)]
mod test;

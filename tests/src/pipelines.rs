#[cfg(test)]
mod fakes;
#[cfg(test)]
mod integration;

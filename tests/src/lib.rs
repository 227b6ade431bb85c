//! End-to-end flows of the lookup and export commands over an in-memory directory.

#[cfg(test)]
mod utils;

#[cfg(test)]
mod lookup {
    mod integration;
}

#[cfg(test)]
mod export {
    mod integration;
}

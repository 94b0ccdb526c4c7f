#![doc = r#"
SQMEAN — weighted average-of-squares, from text files or slices.

This crate computes the (optionally weighted) average of squares of a list of
numbers, read from whitespace-separated text files or supplied directly as
slices. It powers the SQMEAN CLI and can be embedded in your own Rust
applications.

Quick start: compute from slices
--------------------------------
```rust
use sqmean::average_of_squares;

fn main() -> sqmean::Result<()> {
    let unweighted = average_of_squares(&[1.0, 2.0, 4.0], None)?;
    assert_eq!(unweighted, 7.0);

    let weighted = average_of_squares(&[2.0, 4.0], Some(&[1.0, 0.5]))?;
    assert_eq!(weighted, 8.0);
    Ok(())
}
```

Compute from files
------------------
```rust,no_run
use std::path::Path;
use sqmean::compute_from_paths;

fn main() -> sqmean::Result<()> {
    let summary = compute_from_paths(
        Path::new("numbers.txt"),
        Some(Path::new("weights.txt")),
    )?;
    println!("{} ({} numbers)", summary.result, summary.count);
    Ok(())
}
```

Error handling
--------------
All public functions return `sqmean::Result<T>`; match on `sqmean::Error` to
handle specific cases.

```rust
use sqmean::{average_of_squares, Error};

match average_of_squares(&[1.0, 2.0, 4.0], Some(&[1.0, 0.5])) {
    Ok(_) => unreachable!("lengths differ"),
    Err(Error::LengthMismatch { numbers, weights }) => {
        eprintln!("{numbers} numbers but {weights} weights")
    }
    Err(other) => eprintln!("Other error: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points over files.
- [`core`] — token parsing and the calculator itself.
- [`io`] — plain-text number file reader.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use api::{Summary, compute_from_paths};
pub use core::parse::parse_numbers;
pub use core::stats::average_of_squares;
pub use error::{Error, Result};
pub use io::read_numbers;
pub use types::OutputFormat;

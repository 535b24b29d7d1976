// Corpus assembly: CSV rows in, articles out.

pub mod assemble;
pub mod columns;
pub mod csv_rows;
pub mod models;

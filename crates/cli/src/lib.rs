//! `doclink-cli` library half: reading path lists and title sheets, writing
//! match results. The engine itself lives in `doclink-recon`.

pub mod sheets;

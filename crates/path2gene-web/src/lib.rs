//! path2gene-web — pathway → gene lookup front-end.
//!   /              search form
//!   /search/{q}    pathways matching a fragment
//!   /path/{token}  genes for a pathway (trailing `*` = regex match)
//!   /csv/{token}   same genes as a CSV download

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

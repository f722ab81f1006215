pub mod advertisement;

mod router;
pub use router::get_router;

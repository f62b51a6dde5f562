//! Render projection: pure document-to-visual mapping and the standalone
//! document export

pub mod html;
pub mod projection;

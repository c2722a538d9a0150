//! JavaScript collaborators: wallet modal, connectors, widget

pub mod connectors;
pub mod wallet;
pub mod widget;

//! Graph construction
//!
//! A [`Graph`] is built once from CSR-shaped input by [`from_csr`] (or
//! [`GraphBuilder`]) and exposes the views named by its [`ViewSet`]:
//!
//! ```text
//! Graph<R, V, E, W, Views<Csr, Csc, Coo>>
//!   csr: CsrData  | ()      HasCsr when Csr = On
//!   csc: CscData  | ()      HasCsc when Csc = On
//!   coo: CooData  | ()      HasCoo when Coo = On
//! ```
//!
//! [`DynGraph`] covers the case where the view set is only known at runtime.

mod build;
mod dynamic;
#[allow(clippy::module_inception)]
mod graph;
mod view;

pub use build::{from_csr, from_csr_data, from_csr_dyn, BuildScratch, GraphBuilder};
pub use dynamic::DynGraph;
pub use graph::{Graph, HasCoo, HasCsc, HasCsr};
pub use view::{
    CooView, CscCooViews, CscView, CsrCooViews, CsrView, Off, On, Toggle, ViewFlags, ViewSet,
    Views,
};

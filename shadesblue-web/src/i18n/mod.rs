mod bundle;
mod render;

pub use render::{t, t_list, tr, tr1};

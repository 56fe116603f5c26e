pub mod commit;
pub mod editor;
pub mod reconcile;

pub mod subst;

//! Fit data types: the loadout under inspection and its equipment.
//!
//! A [`Fit`] owns the fitted modules, drones and fighters. Equipment
//! exposes typed capability fields (damage capability, loadable charges,
//! tactical effect tags) instead of dynamic predicates; the classifier in
//! [`crate::choices`] reads these fields and nothing else.
//!
//! # Example
//!
//! ```
//! use ammoscope_lib::fit::{Fit, FittedModule};
//!
//! let fit = Fit {
//!     name: "Alpha".to_string(),
//!     modules: vec![FittedModule {
//!         item: Some(2410),
//!         deals_damage: true,
//!         valid_charges: vec![209, 210],
//!     }],
//!     drones: Vec::new(),
//!     fighters: Vec::new(),
//! };
//! assert!(fit.validate().is_ok());
//! ```

pub mod equipment;

pub use equipment::{
    FighterAbility, Fit, FittedDrone, FittedFighter, FittedModule, TacticalEffect,
};

//! Higher-kinded type emulation.

/// A trait representing a type constructor.
///
/// Rust has no native higher-kinded types, so a container applied to `A`
/// names itself applied to any other type through the `WithType` GAT.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type parameter this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>;
}

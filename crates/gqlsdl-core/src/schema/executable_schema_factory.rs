use crate::schema::Schema;

/// The seam through which an execution engine consumes a built
/// [`Schema`].
///
/// This crate does not execute queries. An engine implements this trait to
/// turn the resolved type graph, and the resolver handles bound to its
/// fields, into whatever runnable form it needs.
pub trait ExecutableSchemaFactory<R> {
    type Executable;
    type Error;

    fn build_executable(&self, schema: Schema<R>) -> Result<Self::Executable, Self::Error>;
}

/// Aggregate over the adapters the domain services run on. Cloning is cheap
/// as long as the adapters are (connection handles, clients).
#[derive(Clone)]
pub struct Service<OS, SO> {
    pub(crate) object_storage: OS,
    pub(crate) stored_object_repository: SO,
}

impl<OS, SO> Service<OS, SO> {
    pub fn new(object_storage: OS, stored_object_repository: SO) -> Self {
        Self {
            object_storage,
            stored_object_repository,
        }
    }
}

use crate::application::ports::RenderResource;
use crate::domain::errors::AppResult;

/// Holds at most one live instance of a [`RenderResource`].
///
/// `replace` always destroys the current instance before creating the next one,
/// so a failed create leaves the slot empty rather than showing stale output.
pub struct InstanceSlot<R: RenderResource> {
    resource: R,
    current: Option<R::Instance>,
}

impl<R: RenderResource> InstanceSlot<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            current: None,
        }
    }

    pub fn replace(&mut self, spec: &R::Spec) -> AppResult<()> {
        self.clear();
        self.current = Some(self.resource.create(spec)?);
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            self.resource.destroy(old);
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&R::Instance> {
        self.current.as_ref()
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }
}

impl<R: RenderResource> Drop for InstanceSlot<R> {
    fn drop(&mut self) {
        self.clear();
    }
}

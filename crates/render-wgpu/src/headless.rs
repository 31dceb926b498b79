use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum GpuInitError {
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Device and queue without a surface, for offscreen work and tests.
pub fn request_headless_device() -> Result<(Arc<wgpu::Device>, Arc<wgpu::Queue>), GpuInitError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::LowPower,
        compatible_surface: None,
        force_fallback_adapter: false,
    }))
    .ok_or(GpuInitError::NoAdapter)?;

    let info = adapter.get_info();
    tracing::info!(
        "using adapter {} ({:?}), max texture size {}",
        info.name,
        info.backend,
        adapter.limits().max_texture_dimension_2d
    );

    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("deskscene_device"),
            required_features: wgpu::Features::empty(),
            required_limits: adapter.limits(),
            memory_hints: Default::default(),
        },
        None,
    ))?;

    Ok((Arc::new(device), Arc::new(queue)))
}

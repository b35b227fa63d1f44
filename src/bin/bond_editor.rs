//! Bond Editor - Native Sketching Window
//!
//! Draws straight bonds with the mouse on a wgpu surface.
//!
//! Run with: `cargo run --bin bond_editor`
//! Optional config: `BOND_EDITOR_CONFIG=path/to/editor.json`
//!
//! Controls:
//! - Left mouse: Draw (pencil) or erase (eraser)
//! - P: Pencil tool
//! - E: Eraser tool
//! - Delete: Clear canvas
//! - Ctrl+Z: Undo
//! - Ctrl+Y / Ctrl+Shift+Z: Redo
//! - ESC: Exit

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::sync::Arc;

    use winit::application::ApplicationHandler;
    use winit::dpi::PhysicalSize;
    use winit::event::{ElementState, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
    use winit::window::{Window, WindowAttributes, WindowId};

    use wgpu::util::DeviceExt;

    use bond_sketch_engine::config::EditorConfig;
    use bond_sketch_engine::input::{InputState, KeyCode, MouseButton};
    use bond_sketch_engine::render::mesh::VERTEX_COLOR_OFFSET;
    use bond_sketch_engine::render::{MeshSurface, Vertex};
    use bond_sketch_engine::{Editor, EditorStatus};

    type BoxError = Box<dyn Error>;

    // ========================================================================
    // INPUT TRANSLATION
    // ========================================================================

    fn map_key(key: WinitKey) -> KeyCode {
        match key {
            WinitKey::KeyA => KeyCode::A,
            WinitKey::KeyB => KeyCode::B,
            WinitKey::KeyC => KeyCode::C,
            WinitKey::KeyD => KeyCode::D,
            WinitKey::KeyE => KeyCode::E,
            WinitKey::KeyL => KeyCode::L,
            WinitKey::KeyP => KeyCode::P,
            WinitKey::KeyR => KeyCode::R,
            WinitKey::KeyX => KeyCode::X,
            WinitKey::KeyY => KeyCode::Y,
            WinitKey::KeyZ => KeyCode::Z,
            WinitKey::Escape => KeyCode::Escape,
            WinitKey::Backspace => KeyCode::Backspace,
            WinitKey::Delete => KeyCode::Delete,
            WinitKey::ShiftLeft => KeyCode::ShiftLeft,
            WinitKey::ShiftRight => KeyCode::ShiftRight,
            WinitKey::ControlLeft => KeyCode::ControlLeft,
            WinitKey::ControlRight => KeyCode::ControlRight,
            WinitKey::AltLeft => KeyCode::AltLeft,
            WinitKey::AltRight => KeyCode::AltRight,
            WinitKey::SuperLeft => KeyCode::SuperLeft,
            WinitKey::SuperRight => KeyCode::SuperRight,
            _ => KeyCode::Unknown,
        }
    }

    fn map_button(button: winit::event::MouseButton) -> MouseButton {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Back => MouseButton::Other(3),
            winit::event::MouseButton::Forward => MouseButton::Other(4),
            winit::event::MouseButton::Other(n) => MouseButton::Other(n),
        }
    }

    // ========================================================================
    // GPU RESOURCES
    // ========================================================================

    /// GPU state for the editor window.
    struct EditorGpu {
        device: wgpu::Device,
        queue: wgpu::Queue,
        surface: wgpu::Surface<'static>,
        surface_config: wgpu::SurfaceConfiguration,
        /// Render pipeline for vertex-colored bond quads.
        overlay_pipeline: wgpu::RenderPipeline,
    }

    impl EditorGpu {
        /// Create the device, configure the surface and build the pipeline.
        fn new(window: Arc<Window>) -> Result<Self, BoxError> {
            let size = window.inner_size();

            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });

            let surface = instance.create_surface(Arc::clone(&window))?;

            let adapter =
                pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::LowPower,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                }))?;

            let (device, queue) =
                pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
                    label: Some("Bond Editor Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    ..Default::default()
                }))?;

            let surface_caps = surface.get_capabilities(&adapter);
            let surface_format = surface_caps
                .formats
                .iter()
                .copied()
                .find(|f| f.is_srgb())
                .or_else(|| surface_caps.formats.first().copied())
                .ok_or("surface reports no texture formats")?;

            let present_mode = if surface_caps
                .present_modes
                .contains(&wgpu::PresentMode::AutoVsync)
            {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::Fifo
            };

            let alpha_mode = surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto);

            let surface_config = wgpu::SurfaceConfiguration {
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                format: surface_format,
                width: size.width.max(1),
                height: size.height.max(1),
                present_mode,
                alpha_mode,
                view_formats: vec![],
                desired_maximum_frame_latency: 2,
            };
            surface.configure(&device, &surface_config);

            let overlay_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Bond Overlay Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../shaders/bond_overlay.wgsl").into(),
                ),
            });

            let overlay_pipeline_layout =
                device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Bond Overlay Pipeline Layout"),
                    bind_group_layouts: &[],
                    push_constant_ranges: &[],
                });

            let overlay_pipeline =
                device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some("Bond Overlay Pipeline"),
                    layout: Some(&overlay_pipeline_layout),
                    vertex: wgpu::VertexState {
                        module: &overlay_shader,
                        entry_point: Some("vs_main"),
                        buffers: &[wgpu::VertexBufferLayout {
                            array_stride: std::mem::size_of::<Vertex>() as u64,
                            step_mode: wgpu::VertexStepMode::Vertex,
                            attributes: &[
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x2,
                                    offset: 0,
                                    shader_location: 0, // position
                                },
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x4,
                                    offset: VERTEX_COLOR_OFFSET,
                                    shader_location: 1, // color
                                },
                            ],
                        }],
                        compilation_options: Default::default(),
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: &overlay_shader,
                        entry_point: Some("fs_main"),
                        targets: &[Some(wgpu::ColorTargetState {
                            format: surface_format,
                            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                        compilation_options: Default::default(),
                    }),
                    primitive: wgpu::PrimitiveState {
                        topology: wgpu::PrimitiveTopology::TriangleList,
                        strip_index_format: None,
                        front_face: wgpu::FrontFace::Ccw,
                        cull_mode: None, // quads wind either way
                        unclipped_depth: false,
                        polygon_mode: wgpu::PolygonMode::Fill,
                        conservative: false,
                    },
                    depth_stencil: None,
                    multisample: wgpu::MultisampleState::default(),
                    multiview: None,
                    cache: None,
                });

            tracing::info!(?surface_format, ?present_mode, "GPU initialized");

            Ok(Self {
                device,
                queue,
                surface,
                surface_config,
                overlay_pipeline,
            })
        }

        fn resize(&mut self, new_size: PhysicalSize<u32>) {
            if new_size.width > 0 && new_size.height > 0 {
                self.surface_config.width = new_size.width;
                self.surface_config.height = new_size.height;
                self.surface.configure(&self.device, &self.surface_config);
            }
        }

        /// Clear to `background` and draw the mesh on top.
        fn render(&self, mesh: &MeshSurface, background: [f32; 4]) {
            let output = match self.surface.get_current_texture() {
                Ok(output) => output,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.surface.configure(&self.device, &self.surface_config);
                    return;
                }
                Err(e) => {
                    tracing::error!(error = ?e, "surface error");
                    return;
                }
            };

            let view = output
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

            let mut encoder = self
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Bond Editor Render Encoder"),
                });

            let buffers = if mesh.indices().is_empty() {
                None
            } else {
                let vertex_buffer =
                    self.device
                        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("Bond Vertex Buffer"),
                            contents: bytemuck::cast_slice(mesh.vertices()),
                            usage: wgpu::BufferUsages::VERTEX,
                        });
                let index_buffer =
                    self.device
                        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("Bond Index Buffer"),
                            contents: bytemuck::cast_slice(mesh.indices()),
                            usage: wgpu::BufferUsages::INDEX,
                        });
                Some((vertex_buffer, index_buffer))
            };

            {
                let [r, g, b, a] = background.map(f64::from);
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Bond Editor Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        depth_slice: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

                if let Some((vertex_buffer, index_buffer)) = &buffers {
                    pass.set_pipeline(&self.overlay_pipeline);
                    pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                    pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..mesh.indices().len() as u32, 0, 0..1);
                }
            }

            self.queue.submit(std::iter::once(encoder.finish()));
            output.present();
        }
    }

    // ========================================================================
    // APPLICATION
    // ========================================================================

    /// The editor application: one window, one editor instance.
    struct BondEditorApp {
        window: Option<Arc<Window>>,
        gpu: Option<EditorGpu>,
        editor: Editor<MeshSurface>,
        input: InputState,
        /// Status shown in the title bar last time it was set.
        shown_status: Option<EditorStatus>,
        /// Editor revision last presented.
        presented_revision: Option<u64>,
    }

    impl BondEditorApp {
        fn new(config: EditorConfig) -> Self {
            let input = InputState::with_shortcuts(&config.shortcuts);
            let mesh = MeshSurface::new(1280.0, 800.0, &config.style);
            Self {
                window: None,
                gpu: None,
                editor: Editor::new(config, mesh),
                input,
                shown_status: None,
                presented_revision: None,
            }
        }

        fn initialize(&mut self, window: Arc<Window>) -> Result<(), BoxError> {
            let gpu = EditorGpu::new(Arc::clone(&window))?;
            let size = window.inner_size();
            self.editor
                .surface_mut()
                .set_viewport_size(size.width as f32, size.height as f32);
            self.editor.redraw();

            self.gpu = Some(gpu);
            self.window = Some(window);
            Ok(())
        }

        fn handle_key(&mut self, key: KeyCode, pressed: bool) {
            if let Some(command) = self.input.handle_key(key, pressed) {
                tracing::debug!(?command, "command");
                self.editor.execute(command);
            }
        }

        /// Sync the title bar and request a frame if the editor changed.
        fn refresh(&mut self) {
            let Some(window) = &self.window else {
                return;
            };

            let status = self.editor.status();
            if self.shown_status != Some(status) {
                window.set_title(&format!("Bond Editor - {status}"));
                self.shown_status = Some(status);
            }

            if self.presented_revision != Some(self.editor.revision()) {
                window.request_redraw();
            }
        }
    }

    // ========================================================================
    // APPLICATION HANDLER
    // ========================================================================

    impl ApplicationHandler for BondEditorApp {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }
            let attrs = WindowAttributes::default()
                .with_title("Bond Editor")
                .with_inner_size(PhysicalSize::new(1280, 800));
            let result = event_loop
                .create_window(attrs)
                .map_err(BoxError::from)
                .and_then(|window| self.initialize(Arc::new(window)));
            if let Err(e) = result {
                tracing::error!(error = %e, "failed to initialize window");
                event_loop.exit();
            }
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _: WindowId,
            event: WindowEvent,
        ) {
            match event {
                WindowEvent::CloseRequested => event_loop.exit(),

                WindowEvent::KeyboardInput { event, .. } => {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        let pressed = event.state == ElementState::Pressed;
                        if key == WinitKey::Escape && pressed {
                            event_loop.exit();
                            return;
                        }
                        self.handle_key(map_key(key), pressed);
                    }
                }

                WindowEvent::Focused(false) => self.input.reset(),

                WindowEvent::MouseInput { button, state, .. } => {
                    let pressed = state == ElementState::Pressed;
                    if let Some(pointer) = self.input.pointer.button(map_button(button), pressed)
                    {
                        self.editor.handle_pointer(pointer);
                    }
                }

                WindowEvent::CursorMoved { position, .. } => {
                    let pointer = self
                        .input
                        .pointer
                        .cursor_moved(position.x as f32, position.y as f32);
                    self.editor.handle_pointer(pointer);
                }

                WindowEvent::CursorLeft { .. } => {
                    let pointer = self.input.pointer.cursor_left();
                    self.editor.handle_pointer(pointer);
                }

                WindowEvent::Resized(new_size) => {
                    if let Some(gpu) = &mut self.gpu {
                        gpu.resize(new_size);
                    }
                    self.editor
                        .surface_mut()
                        .set_viewport_size(new_size.width as f32, new_size.height as f32);
                    self.editor.redraw();
                }

                WindowEvent::RedrawRequested => {
                    if let Some(gpu) = &self.gpu {
                        gpu.render(self.editor.surface(), self.editor.config().style.background);
                        self.presented_revision = Some(self.editor.revision());
                    }
                }

                _ => {}
            }

            self.refresh();
        }
    }

    // ========================================================================
    // MAIN
    // ========================================================================

    fn load_config() -> EditorConfig {
        match EditorConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid editor config, using defaults");
                EditorConfig::default()
            }
        }
    }

    pub fn run() -> Result<(), BoxError> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("bond_editor=info,bond_sketch_engine=info")
                }),
            )
            .init();

        println!("===========================================");
        println!("   Bond Editor");
        println!("===========================================");
        println!();
        println!("Controls:");
        println!("  Left mouse: Draw / erase");
        println!("  P: Pencil tool");
        println!("  E: Eraser tool");
        println!("  Delete: Clear canvas");
        println!("  Ctrl+Z: Undo");
        println!("  Ctrl+Y / Ctrl+Shift+Z: Redo");
        println!("  ESC: Exit");
        println!();

        let config = load_config();
        tracing::info!(tool = %config.initial_tool, "starting bond editor");

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        let mut app = BondEditorApp::new(config);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

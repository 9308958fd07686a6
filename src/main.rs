fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let controller = mandelbrot_render::MandelbrotController::new(mandelbrot_render::RenderConfig::default())?;
    let (buffer, stats) = controller.render_to_buffer()?;

    log::info!(
        "Rendered {}x{} surface: {} samples, {} in set",
        buffer.width(),
        buffer.height(),
        stats.samples,
        stats.bounded
    );

    Ok(())
}

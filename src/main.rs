use recon_dashboard::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

use lit_scene::SceneConfig;

fn main() -> anyhow::Result<()> {
    lit_scene::run(SceneConfig::from_env())
}

use std::path::Path;

use parley_config::Config;
use parley_core::DictionaryStore;

use crate::cli::{DictionaryAction, ProfileAction};
use crate::profile;

pub fn run_dictionary(config: &Config, action: DictionaryAction) -> anyhow::Result<()> {
    let store = DictionaryStore::from_config(&config.dictionary);
    let locale_or_default = |locale: Option<String>| locale.unwrap_or_else(|| config.locale.clone());

    match action {
        DictionaryAction::List { locale } => {
            let locale = locale_or_default(locale);
            println!("learned ({locale}):");
            for word in store.learned_words(&locale) {
                println!("  {word}");
            }
            println!("ignored ({locale}):");
            for word in store.ignored_words(&locale) {
                println!("  {word}");
            }
        }
        DictionaryAction::Learn { word, locale } => {
            store.learn(&word, &locale_or_default(locale))?;
        }
        DictionaryAction::Unlearn { word, locale } => {
            store.unlearn(&word, &locale_or_default(locale))?;
        }
        DictionaryAction::Ignore { word, locale } => {
            store.ignore(&word, &locale_or_default(locale))?;
        }
    }

    Ok(())
}

pub fn run_profile(profiles: &Path, action: ProfileAction) -> anyhow::Result<()> {
    match action {
        ProfileAction::List => {
            for name in profile::list_profiles(profiles)? {
                println!("{name}");
            }
        }
        ProfileAction::Add { name } => {
            let file = profile::add_profile_from_default(profiles, &name)?;
            println!("{}", file.display());
        }
    }

    Ok(())
}

use crate::error::{ExtractError, Result};
use crate::extractor::model::Kind;
use syn::{ImplItem, ImplItemFn, Item, ItemFn};

/// Find the top-level definition called `name` in one file's source text and
/// render it back as formatted Rust.
///
/// Functions are looked up first across the whole file (free functions and
/// methods of top-level `impl` blocks, in source order). Type definitions are
/// only considered when no function matched, so a function and a type that
/// share a name resolve to the function.
pub fn extract(source: &str, name: &str) -> Result<(String, Kind)> {
    let file = syn::parse_file(source).map_err(|e| ExtractError::Parse {
        message: e.to_string(),
    })?;

    if let Some(func) = find_function(&file.items, name) {
        return Ok((render(Item::Fn(func)), Kind::Function));
    }
    if let Some(item) = find_type(&file.items, name) {
        return Ok((render(item.clone()), Kind::Struct));
    }
    Err(ExtractError::NotFound {
        name: name.to_string(),
    })
}

fn find_function(items: &[Item], name: &str) -> Option<ItemFn> {
    for item in items {
        match item {
            Item::Fn(f) if f.sig.ident == name => return Some(f.clone()),
            Item::Impl(im) => {
                let method = im.items.iter().find_map(|it| match it {
                    ImplItem::Fn(m) if m.sig.ident == name => Some(m),
                    _ => None,
                });
                if let Some(m) = method {
                    return Some(method_as_fn(m));
                }
            }
            _ => {}
        }
    }
    None
}

fn find_type<'a>(items: &'a [Item], name: &str) -> Option<&'a Item> {
    items.iter().find(|item| match item {
        Item::Struct(s) => s.ident == name,
        Item::Enum(e) => e.ident == name,
        Item::Union(u) => u.ident == name,
        Item::Type(t) => t.ident == name,
        Item::Trait(t) => t.ident == name,
        _ => false,
    })
}

// A method rendered on its own, outside its impl block.
fn method_as_fn(m: &ImplItemFn) -> ItemFn {
    ItemFn {
        attrs: m.attrs.clone(),
        vis: m.vis.clone(),
        sig: m.sig.clone(),
        block: Box::new(m.block.clone()),
    }
}

fn render(item: Item) -> String {
    let file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: vec![item],
    };
    let mut text = prettyplease::unparse(&file);
    text.truncate(text.trim_end().len());
    text
}

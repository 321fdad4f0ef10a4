use criterion::{Criterion, black_box, criterion_group, criterion_main};
use folio_core::ColorMode;
use folio_site::{BatchInput, BatchOptions, Options, SiteConfig, render_batch, render_nav, render_post};

const POST: &str = r#"---
title: Building a blog
publishedAt: 2021-03-14
---

# Building a blog

Some text with an [internal link](/about) and an [external one](https://example.com).

## Setup {#setup}

- first
- second
- [x] done

```js:next.config.js
module.exports = { reactStrictMode: true };
```

<Image src="/static/images/cover.png" alt="The cover" ratio={16/9} chakraWidth="70%" border />

<VStack spacing="4">
  <Checkbox isChecked>Read the docs</Checkbox>
  <TextColorMode />
</VStack>
"#;

fn bench_render(c: &mut Criterion) {
    let options = Options::default();
    c.bench_function("render_post", |b| {
        b.iter(|| render_post(black_box(POST), &options))
    });

    let site = SiteConfig::default();
    c.bench_function("render_nav", |b| {
        b.iter(|| render_nav(black_box(&site), ColorMode::Dark))
    });

    let inputs: Vec<_> = (0..64)
        .map(|i| BatchInput {
            id: format!("post-{i}.mdx"),
            source: POST.to_string(),
        })
        .collect();
    let batch = BatchOptions::default();
    c.bench_function("render_batch_64", |b| {
        b.iter(|| render_batch(inputs.clone(), &batch))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

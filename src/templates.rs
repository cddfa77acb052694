//! Starter files for `sbor init`.
//!
//! `sbor.conf` and `src/include.h` are not templates: they come from
//! [`Manifest::to_document`](crate::config::Manifest::to_document) and
//! [`includes::render`](crate::includes::render) so a fresh project is
//! already in the shape the manifest editor expects.

pub fn cmake_lists(name: &str) -> String {
    format!(
        r#"cmake_minimum_required(VERSION 3.10)
project({name} C)

set(CMAKE_C_STANDARD 11)
set(CMAKE_C_STANDARD_REQUIRED ON)

file(GLOB_RECURSE SOURCES "${{CMAKE_SOURCE_DIR}}/src/*.c")

add_executable({name} ${{SOURCES}})
target_include_directories({name} PRIVATE "${{CMAKE_SOURCE_DIR}}/src")
"#
    )
}

pub fn main_c() -> String {
    r#"#include "include.h"

int main(int argc, char *argv[]) {
    (void)argc;
    (void)argv;

    printf("Hello from sbor!\n");
    return EXIT_SUCCESS;
}
"#
    .to_string()
}

pub fn readme(name: &str) -> String {
    format!(
        r#"# {name}

A C project managed by sbor.

## Build & run

```sh
sbor build
sbor run
```

## Headers

```sh
sbor add string        # adds <string.h>
sbor add -c myheader.h # adds "myheader.h"
sbor remove string
```

`src/include.h` is generated from `sbor.conf`; edit headers with `sbor add`/`sbor remove`.
"#
    )
}

pub fn gitignore() -> String {
    "build/\n*.o\n*.a\n*.so\n*.exe\n".to_string()
}
